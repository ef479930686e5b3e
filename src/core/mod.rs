pub mod area_series;
pub mod layout;
pub mod lookup;
pub mod price_scale;
pub mod primitives;
pub mod scale;
pub mod time_scale;
pub mod time_ticks;
pub mod types;
pub mod volume_bars;
pub mod volume_scale;

pub use area_series::{AreaGeometry, AreaVertex, PathCommand, monotone_x_path, project_area_geometry};
pub use layout::{PlotLayout, PlotMargins};
pub use lookup::{bisect_left, nearest_sample_index};
pub use price_scale::{PriceScale, PriceScaleTuning};
pub use scale::LinearScale;
pub use time_scale::TimeScale;
pub use time_ticks::{TimeTickInterval, select_tick_interval, ticks_for_interval, time_ticks};
pub use types::{Sample, ViewState, Viewport, validate_samples};
pub use volume_bars::{VolumeBar, project_volume_bars};
pub use volume_scale::VolumeScale;
