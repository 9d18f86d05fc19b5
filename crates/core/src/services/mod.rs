pub mod animation;
pub mod format;
pub mod geometry_service;
pub mod gesture_service;
pub mod period_service;
pub mod touch_service;
