//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# tokensmith configuration
# Schema version 1
# Missing sections use the defaults shown here. A token table that is
# present replaces the default table of the same name as a whole.

# media | class | selector, optionally with a custom selector:
# dark_mode = ["class", ".theme-dark"]
dark_mode = ["class"]

# Files scanned for utility-class usage.
content = ["index.html", "src/**/*.{js,ts,jsx,tsx,html,css}"]

# Utility providers, registered in order.
plugins = ["typography", "container-queries", "animate"]

[resolution]
# rem_base_px = 16           # 1-64, px per rem when mixing units
# default_mode = "light"     # variable set used when --mode is not given
# builtin_variables = true   # start from the built-in light/dark values

[theme.container]
center = true
padding = "2rem"

[theme.container.screens]
2xl = "1400px"

# Colors indirect through base variables. `<alpha-value>` marks tokens that
# accept an opacity modifier (bg-primary/50).
[theme.extend.colors]
border = "oklch(var(--border))"
input = "oklch(var(--input))"
ring = "oklch(var(--ring) / <alpha-value>)"
background = "oklch(var(--background))"
foreground = "oklch(var(--foreground))"

[theme.extend.colors.primary]
DEFAULT = "oklch(var(--primary) / <alpha-value>)"
foreground = "oklch(var(--primary-foreground))"

[theme.extend.colors.secondary]
DEFAULT = "oklch(var(--secondary) / <alpha-value>)"
foreground = "oklch(var(--secondary-foreground))"

[theme.extend.colors.destructive]
DEFAULT = "oklch(var(--destructive) / <alpha-value>)"
foreground = "oklch(var(--destructive-foreground))"

[theme.extend.colors.muted]
DEFAULT = "oklch(var(--muted) / <alpha-value>)"
foreground = "oklch(var(--muted-foreground) / <alpha-value>)"

[theme.extend.colors.accent]
DEFAULT = "oklch(var(--accent) / <alpha-value>)"
foreground = "oklch(var(--accent-foreground))"

[theme.extend.colors.popover]
DEFAULT = "oklch(var(--popover))"
foreground = "oklch(var(--popover-foreground))"

[theme.extend.colors.card]
DEFAULT = "oklch(var(--card))"
foreground = "oklch(var(--card-foreground))"

[theme.extend.colors.success]
DEFAULT = "oklch(var(--success))"
foreground = "oklch(var(--success-foreground))"

[theme.extend.colors.warning]
DEFAULT = "oklch(var(--warning))"
foreground = "oklch(var(--warning-foreground))"

[theme.extend.colors.chart]
1 = "oklch(var(--chart-1))"
2 = "oklch(var(--chart-2))"
3 = "oklch(var(--chart-3))"
4 = "oklch(var(--chart-4))"
5 = "oklch(var(--chart-5))"

[theme.extend.colors.sidebar]
DEFAULT = "oklch(var(--sidebar))"
foreground = "oklch(var(--sidebar-foreground))"
primary = "oklch(var(--sidebar-primary))"
primary-foreground = "oklch(var(--sidebar-primary-foreground))"
accent = "oklch(var(--sidebar-accent))"
accent-foreground = "oklch(var(--sidebar-accent-foreground))"
border = "oklch(var(--sidebar-border))"
ring = "oklch(var(--sidebar-ring))"

# Derived from a single root variable.
[theme.extend.border_radius]
lg = "var(--radius)"
md = "calc(var(--radius) - 2px)"
sm = "calc(var(--radius) - 4px)"

[theme.extend.box_shadow]
xs = "0 1px 2px 0 rgba(0,0,0,0.05)"
soft = "0 2px 8px -2px rgba(0,0,0,0.1)"
medium = "0 4px 16px -4px rgba(0,0,0,0.15)"

[theme.extend.font_family]
sans = ["Inter", "-apple-system", "BlinkMacSystemFont", "Segoe UI", "sans-serif"]
display = ["Inter", "-apple-system", "BlinkMacSystemFont", "Segoe UI", "sans-serif"]

[theme.extend.keyframes.accordion-down]
from = { height = "0" }
to = { height = "var(--radix-accordion-content-height)" }

[theme.extend.keyframes.accordion-up]
from = { height = "var(--radix-accordion-content-height)" }
to = { height = "0" }

[theme.extend.keyframes.fade-in]
from = { opacity = "0", transform = "translateY(10px)" }
to = { opacity = "1", transform = "translateY(0)" }

# Every animation must name keyframes defined above.
[theme.extend.animation]
accordion-down = "accordion-down 0.2s ease-out"
accordion-up = "accordion-up 0.2s ease-out"
fade-in = "fade-in 0.5s ease-out"

# Base variable overrides, layered over the built-in light/dark sets.
# [variables.light]
# primary = "0.6 0.15 250"
# radius = "0.5rem"
#
# [variables.dark]
# primary = "0.7 0.15 250"
"##
    .to_string()
}
