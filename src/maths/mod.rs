pub mod specfun;
