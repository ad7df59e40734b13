pub use crate::color::Color;
pub use crate::effects::{Dispose, effect};
pub use crate::error::{ConfigError, ErrorBoundary, ErrorInfo};
pub use crate::geometry::{Rect, Size, Vec2};
pub use crate::host::{Host, Measurement};
pub use crate::lifecycle::{Lifecycle, use_instance};
pub use crate::locals::{Theme, theme, with_theme};
pub use crate::modifier::{Length, Modifier, PaddingValues, Parts};
pub use crate::position::{Alignment, Orientation, Position};
pub use crate::reactive::observe;
pub use crate::runtime::{Scheduler, request_frame};
pub use crate::scope::{Scope, current_scope};
pub use crate::signal::{Signal, signal};
pub use crate::view::{Callback, View, ViewKind};
pub use taffy::{AlignItems, AlignSelf, FlexDirection, JustifyContent};
