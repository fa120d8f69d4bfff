#[derive(Debug)]
pub struct Entry<T, U> {
    pub key: T,
    pub value: U,
}
