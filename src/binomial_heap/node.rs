/// A struct representing the root of a binomial tree. The child at index `i` is the root of a
/// binomial tree of degree `i`.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub key: T,
    pub children: Vec<Node<T>>,
}

impl<T> Node<T>
where
    T: Ord,
{
    pub fn new(key: T) -> Self {
        Node {
            key,
            children: Vec::new(),
        }
    }

    pub fn degree(&self) -> usize {
        self.children.len()
    }

    // precondition: both trees have the same degree
    pub fn link(mut self, mut other: Node<T>) -> Node<T> {
        debug_assert_eq!(self.degree(), other.degree());
        if self.key < other.key {
            std::mem::swap(&mut self, &mut other);
        }
        self.children.push(other);
        self
    }
}
