mod test_init;
mod test_snapshot;
