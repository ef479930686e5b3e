mod engine;
mod engine_accessors;
mod engine_config;
mod interaction_controller;
mod label_format;
mod label_formatter_controller;
mod layout_helpers;
mod overlay_frame_builder;
mod render_frame_builder;
mod render_style;
mod scene;

pub use engine::{ChartEngine, RenderOutcome, SkipReason};
pub use engine_config::{ChartEngineConfig, MAX_TIME_TICK_COUNT, TooltipPlacement};
pub use label_format::{
    CurrencyFormatterFn, DateFormatterFn, LabelFormatters, format_date_time, format_short_date,
    format_time_tick, format_usd,
};
pub use render_style::RenderStyle;
pub use scene::ChartScene;
