mod scanner;
mod view;

pub use view::ScanStationPage;
