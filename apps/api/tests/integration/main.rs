mod helpers;
mod test_addresses;
