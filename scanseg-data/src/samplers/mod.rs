pub mod split_view;

pub use split_view::SplitView;
