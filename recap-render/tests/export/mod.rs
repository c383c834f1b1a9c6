mod round_trip;
mod structure;
