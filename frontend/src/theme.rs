use shared::ThemeName;

use crate::config::Config;

/// Tailwind classes and chart colours for one dashboard look.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub page: &'static str,
    pub panel: &'static str,
    pub heading: &'static str,
    pub muted: &'static str,
    pub accent_text: &'static str,
    pub primary_button: &'static str,
    pub secondary_button: &'static str,
    pub input: &'static str,
    pub tab_active: &'static str,
    pub tab_idle: &'static str,
    pub table_head: &'static str,
    pub table_row: &'static str,
    pub error_banner: &'static str,
    /// Stroke and fill colours for chart series, cycled in order
    pub series: &'static [&'static str],
    pub axis: &'static str,
    pub chart_text: &'static str,
}

pub const EMBER: Palette = Palette {
    page: "min-h-screen bg-black text-white",
    panel: "bg-zinc-900 border border-orange-500/30 rounded-lg shadow-lg",
    heading: "text-orange-400",
    muted: "text-zinc-400",
    accent_text: "text-orange-500",
    primary_button: "bg-orange-500 hover:bg-orange-600 text-black font-semibold rounded-md disabled:opacity-50 disabled:cursor-not-allowed",
    secondary_button: "bg-zinc-800 hover:bg-zinc-700 text-orange-300 border border-orange-500/40 rounded-md disabled:opacity-40 disabled:cursor-not-allowed",
    input: "bg-zinc-950 border border-orange-500/40 text-white placeholder-zinc-500 rounded-md focus:outline-none focus:ring-2 focus:ring-orange-500",
    tab_active: "border-b-2 border-orange-500 text-orange-400",
    tab_idle: "border-b-2 border-transparent text-zinc-400 hover:text-orange-300",
    table_head: "bg-zinc-950 text-orange-400",
    table_row: "border-t border-zinc-800 hover:bg-zinc-800/60",
    error_banner: "bg-red-950 border border-red-500/60 text-red-200 rounded-md",
    series: &["#FF8C00", "#FF9F1C", "#FFB84D", "#FFA500", "#FF7F00"],
    axis: "#52525B",
    chart_text: "#E4E4E7",
};

pub const DAYLIGHT: Palette = Palette {
    page: "min-h-screen bg-gray-50 text-gray-900",
    panel: "bg-white border border-gray-200 rounded-lg shadow",
    heading: "text-gray-900",
    muted: "text-gray-500",
    accent_text: "text-indigo-600",
    primary_button: "bg-indigo-600 hover:bg-indigo-700 text-white font-semibold rounded-md disabled:opacity-50 disabled:cursor-not-allowed",
    secondary_button: "bg-white hover:bg-gray-100 text-gray-700 border border-gray-300 rounded-md disabled:opacity-40 disabled:cursor-not-allowed",
    input: "bg-white border border-gray-300 text-gray-900 placeholder-gray-400 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500",
    tab_active: "border-b-2 border-indigo-500 text-indigo-600",
    tab_idle: "border-b-2 border-transparent text-gray-500 hover:text-gray-700",
    table_head: "bg-gray-100 text-gray-600",
    table_row: "border-t border-gray-200 hover:bg-gray-50",
    error_banner: "bg-red-50 border border-red-300 text-red-700 rounded-md",
    series: &["#6366F1", "#8B5CF6", "#EC4899", "#14B8A6", "#F59E0B"],
    axis: "#D1D5DB",
    chart_text: "#374151",
};

pub fn palette(theme: ThemeName) -> &'static Palette {
    match theme {
        ThemeName::Ember => &EMBER,
        ThemeName::Daylight => &DAYLIGHT,
    }
}

/// Palette for the theme configured at build time.
pub fn current() -> &'static Palette {
    palette(Config::load().theme)
}

impl Palette {
    /// Colour for the `index`-th series or slice.
    pub fn series_color(&self, index: usize) -> &'static str {
        self.series[index % self.series.len()]
    }
}
