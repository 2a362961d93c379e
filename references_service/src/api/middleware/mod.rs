pub(in crate::api) mod api_key;
