pub mod report_routine;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;
