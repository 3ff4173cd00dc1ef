use std::fmt::{Debug, Formatter};
use std::ops::Deref;
use std::rc::Rc;

/// Like [`Rc`] but always implements [`Eq`] and [`PartialEq`] according to reference equality,
/// so services (including trait objects) can be passed as component properties.
#[repr(transparent)]
pub struct PtrEqRc<T: ?Sized>(Rc<T>);

impl<T> PtrEqRc<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(value))
    }
}

impl<T: ?Sized> From<Rc<T>> for PtrEqRc<T> {
    fn from(rc: Rc<T>) -> Self {
        Self(rc)
    }
}

impl<T: ?Sized> Clone for PtrEqRc<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: ?Sized + Debug> Debug for PtrEqRc<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: ?Sized> Deref for PtrEqRc<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: ?Sized> PartialEq for PtrEqRc<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Eq for PtrEqRc<T> {}

#[cfg(test)]
mod tests {
    use crate::ptr_eq_rc::PtrEqRc;
    use std::fmt::Debug;
    use std::rc::Rc;

    #[test]
    fn reference_equality() {
        let a = PtrEqRc::new(5);
        let b = PtrEqRc::new(5);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn trait_object() {
        let a: PtrEqRc<dyn Debug> = PtrEqRc::from(Rc::new(1u8) as Rc<dyn Debug>);
        assert_eq!(a, a.clone());
        assert_eq!(format!("{:?}", a), "1");
    }
}
