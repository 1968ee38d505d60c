/// One to-do entry bound to a specific calendar date.
///
/// `id` is assigned by the store on insert and stays stable for the task's
/// lifetime. `date` is a zero-padded `dd.mm.yyyy` key, matched by exact
/// string equality and never parsed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub date: String,
    pub text: String,
    pub completed: bool,
}
