//! Operator forms of pushing and concatenation.
//!
//! | Expression          | Meaning                                  |
//! |---------------------|------------------------------------------|
//! | `deque + elt`       | [`Deque::push_back`]                     |
//! | `deque + other`     | [`Deque::splice`], `other` is consumed   |
//! | `deque + &other`    | [`Deque::concat`], `other` is unchanged  |
//! | `&deque + &other`   | a new deque holding copies of both       |
//!
//! Each has an `+=` counterpart, except the last one.

use crate::deque::Deque;
use std::ops::{Add, AddAssign};

impl<T> Add<T> for Deque<T> {
    type Output = Deque<T>;

    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let deque = Deque::from([1, 2, 3, 4]);
    /// let five: i32 = 5;
    /// let deque = deque + five;
    /// assert_eq!(deque.to_string(), "1 2 3 4 5");
    /// ```
    fn add(mut self, elt: T) -> Self::Output {
        self.push_back(elt);
        self
    }
}

impl<T> AddAssign<T> for Deque<T> {
    fn add_assign(&mut self, elt: T) {
        self.push_back(elt);
    }
}

impl<T> Add for Deque<T> {
    type Output = Deque<T>;

    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let deque = Deque::from([0, 1]) + Deque::from([2, 3]);
    /// assert_eq!(deque.to_string(), "0 1 2 3");
    /// ```
    fn add(mut self, other: Deque<T>) -> Self::Output {
        self.splice(other);
        self
    }
}

impl<T> AddAssign for Deque<T> {
    fn add_assign(&mut self, other: Deque<T>) {
        self.splice(other);
    }
}

impl<T: Clone> Add<&Deque<T>> for Deque<T> {
    type Output = Deque<T>;

    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let other = Deque::from([2, 3]);
    /// let deque = Deque::from([0, 1]) + &other;
    /// assert_eq!(deque.to_string(), "0 1 2 3");
    /// assert_eq!(other.to_string(), "2 3");
    /// ```
    fn add(mut self, other: &Deque<T>) -> Self::Output {
        self.concat(other);
        self
    }
}

impl<T: Clone> AddAssign<&Deque<T>> for Deque<T> {
    fn add_assign(&mut self, other: &Deque<T>) {
        self.concat(other);
    }
}

impl<T: Clone> Add<&Deque<T>> for &Deque<T> {
    type Output = Deque<T>;

    /// # Examples
    ///
    /// ```
    /// use linked_deque::Deque;
    ///
    /// let deque = Deque::from([0, 1]);
    /// assert_eq!((&deque + &deque).to_string(), "0 1 0 1");
    /// assert_eq!(deque.to_string(), "0 1");
    /// ```
    fn add(self, other: &Deque<T>) -> Self::Output {
        let mut sum = self.clone();
        sum.concat(other);
        sum
    }
}

#[cfg(test)]
mod tests {
    use crate::Deque;

    #[test]
    fn add_element() {
        let mut deque = Deque::from([1, 2]);
        let three: i32 = 3;
        deque += three;
        let four: i32 = 4;
        let deque = deque + four;
        assert_eq!(deque.to_string(), "1 2 3 4");
        deque.assert_links();

        let words = Deque::<String>::new() + String::from("moved");
        assert_eq!(words.peek_back().map(String::as_str), Ok("moved"));
    }

    #[test]
    fn add_deque_by_value() {
        let mut deque = Deque::from([0, 1, 2, 3, 4]);
        deque += Deque::from([1, 1, 1, 0]);
        assert_eq!(deque.to_string(), "0 1 2 3 4 1 1 1 0");
        deque.assert_links();

        let deque = Deque::<i32>::new() + deque;
        assert_eq!(deque.len(), 9);
        deque.assert_links();
    }

    #[test]
    fn add_deque_by_reference() {
        let other = Deque::from([2, 2, 2, 0]);
        let mut deque = Deque::from([0, 1]);
        deque += &other;
        let deque = deque + &other;
        assert_eq!(deque.to_string(), "0 1 2 2 2 0 2 2 2 0");
        assert_eq!(other.to_string(), "2 2 2 0");
        deque.assert_links();
        other.assert_links();
    }

    #[test]
    fn add_references() {
        let a = Deque::from([0, 1, 2, 3, 4]);
        let b = a.clone();
        let doubled = &a + &a;
        assert_eq!(doubled.to_string(), "0 1 2 3 4 0 1 2 3 4");
        assert_eq!(&a + &b, doubled);
        assert_eq!(a.to_string(), "0 1 2 3 4");
        doubled.assert_links();
    }
}
