/// # get hidden sensitive string
///
/// convert string from "something" to "*********"
///
/// ### Arguments
///
/// * `str`: original string
pub(crate) fn get_hidden_sensitive_string(str: &str) -> String {
    str.chars().map(|_| '*').collect()
}
