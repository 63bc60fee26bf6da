pub mod evictor;
