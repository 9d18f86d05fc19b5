pub mod chart;
pub mod gesture;
pub mod nav;
pub mod period;
pub mod settings;
pub mod snapshot;
pub mod state;
pub mod touch;
