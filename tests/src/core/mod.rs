mod classifier;
mod decoder;
mod metrics;
mod script;
mod sigops;
