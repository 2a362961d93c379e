pub(crate) static API_KEY_HEADER: &str = "x-api-key";
pub(crate) static OASST_USER_HEADER: &str = "x-oasst-user";
