pub mod feed;
pub mod onboard;
pub mod progress;
pub mod reflect;
pub mod seed;
pub mod today;
