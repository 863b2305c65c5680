/// Number of questions returned per result page.
pub const PAGE_SIZE: u64 = 20;
