#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    #[inline]
    fn flip(&mut self) {
        *self = match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

pub type Link<K, V> = Option<Box<Node<K, V>>>;

/// A tree node. `color` is the color of the link from the parent to this
/// node, `size` the number of nodes in the subtree rooted here.
#[derive(Debug)]
pub struct Node<K, V> {
    pub key: K,
    pub value: V,
    pub left: Link<K, V>,
    pub right: Link<K, V>,
    pub size: usize,
    pub color: Color,
}

impl<K, V> Node<K, V> {
    /// New nodes always hang off a red link.
    pub fn new_leaf(key: K, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
            size: 1,
            color: Color::Red,
        })
    }

    #[inline]
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    #[inline]
    pub fn update_size(&mut self) {
        self.size = 1 + size(&self.left) + size(&self.right);
    }
}

#[inline]
pub fn size<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |n| n.size)
}

#[inline]
pub fn is_red<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().map_or(false, |n| n.is_red())
}

/// True if `link` has a red left child.
#[inline]
pub fn is_red_left<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().map_or(false, |n| is_red(&n.left))
}

pub fn rotate_left<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut x) = h.right.take() else {
        return h;
    };
    h.right = x.left.take();
    x.color = h.color;
    h.color = Color::Red;
    x.size = h.size;
    h.update_size();
    x.left = Some(h);
    x
}

pub fn rotate_right<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut x) = h.left.take() else {
        return h;
    };
    h.left = x.right.take();
    x.color = h.color;
    h.color = Color::Red;
    x.size = h.size;
    h.update_size();
    x.right = Some(h);
    x
}

pub fn flip_colors<K, V>(h: &mut Node<K, V>) {
    debug_assert!(h.left.is_some() && h.right.is_some());
    h.color.flip();
    if let Some(left) = h.left.as_mut() {
        left.color.flip();
    }
    if let Some(right) = h.right.as_mut() {
        right.color.flip();
    }
}

/// Post-insertion fix-up. The three steps must run in this order.
pub fn fix_up<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if is_red(&h.right) && !is_red(&h.left) {
        h = rotate_left(h);
    }
    if is_red(&h.left) && is_red_left(&h.left) {
        h = rotate_right(h);
    }
    if is_red(&h.left) && is_red(&h.right) {
        flip_colors(&mut h);
    }
    h.update_size();
    h
}

/// Restore the 2-3 invariant on the way up from a deletion.
pub fn balance<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if is_red(&h.right) {
        h = rotate_left(h);
    }
    if is_red(&h.left) && is_red_left(&h.left) {
        h = rotate_right(h);
    }
    if is_red(&h.left) && is_red(&h.right) {
        flip_colors(&mut h);
    }
    h.update_size();
    h
}

/// Assuming `h` is red and both `h.left` and `h.left.left` are black, make
/// `h.left` or one of its children red.
pub fn move_red_left<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    flip_colors(&mut h);
    if is_red_left(&h.right) {
        h.right = h.right.take().map(rotate_right);
        h = rotate_left(h);
        flip_colors(&mut h);
    }
    h
}

/// Assuming `h` is red and both `h.right` and `h.right.left` are black, make
/// `h.right` or one of its children red.
pub fn move_red_right<K, V>(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
    flip_colors(&mut h);
    if is_red_left(&h.left) {
        h = rotate_right(h);
        flip_colors(&mut h);
    }
    h
}
