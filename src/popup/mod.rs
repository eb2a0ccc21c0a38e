pub mod state;

pub use state::{PanelView, Phase, Popup, PopupView};
