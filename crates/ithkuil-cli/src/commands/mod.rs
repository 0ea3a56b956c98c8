pub mod generate;
pub mod parse;
pub mod phonotactics;
pub mod roundtrip;
pub mod sentence;
