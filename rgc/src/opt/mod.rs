pub mod rgc;
