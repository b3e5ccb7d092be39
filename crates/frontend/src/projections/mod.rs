pub mod p900_returns;
