pub mod scan_station;
