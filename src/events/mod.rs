pub mod layout;
pub mod lifecycle;
pub mod orientation;
pub mod pointer;

pub use layout::listen_layout;
pub use lifecycle::listen_page;
pub use orientation::listen_orientation;
pub use pointer::listen_pointer;
