mod counter;
mod gallery;
mod layout;

pub use counter::CounterDemo;
pub use gallery::Gallery;
pub use layout::AppLayout;
