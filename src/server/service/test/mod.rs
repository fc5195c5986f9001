mod client;
mod occupancy;
