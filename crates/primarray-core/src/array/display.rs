//! `Display` and `Debug` formatting for [`PrimitiveArray`].

use core::fmt;

use crate::kind::Element;

use super::PrimitiveArray;

impl<T: Element> fmt::Display for PrimitiveArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", T::KIND)?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

impl<T: Element> fmt::Debug for PrimitiveArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimitiveArray")
            .field("kind", &T::KIND)
            .field("elements", &self.as_slice())
            .finish()
    }
}
