mod test_domain;
mod test_resolution;
