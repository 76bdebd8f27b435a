//! `core::ops` implementations for [`BoundedInt`].

use crate::BoundedInt;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! impl_binop {
    ($trait:ident, $method:ident) => {
        impl $trait<&BoundedInt> for &BoundedInt {
            type Output = BoundedInt;

            fn $method(self, rhs: &BoundedInt) -> BoundedInt {
                BoundedInt::$method(self, rhs)
            }
        }

        impl $trait<&BoundedInt> for BoundedInt {
            type Output = BoundedInt;

            fn $method(self, rhs: &BoundedInt) -> BoundedInt {
                BoundedInt::$method(&self, rhs)
            }
        }

        impl $trait<BoundedInt> for BoundedInt {
            type Output = BoundedInt;

            fn $method(self, rhs: BoundedInt) -> BoundedInt {
                BoundedInt::$method(&self, &rhs)
            }
        }
    };
}

impl_binop!(Add, add);
impl_binop!(Sub, sub);
impl_binop!(Mul, mul);
impl_binop!(Div, div);

impl AddAssign<&BoundedInt> for BoundedInt {
    fn add_assign(&mut self, rhs: &BoundedInt) {
        *self = BoundedInt::add(self, rhs);
    }
}

impl SubAssign<&BoundedInt> for BoundedInt {
    fn sub_assign(&mut self, rhs: &BoundedInt) {
        *self = BoundedInt::sub(self, rhs);
    }
}

impl MulAssign<&BoundedInt> for BoundedInt {
    fn mul_assign(&mut self, rhs: &BoundedInt) {
        *self = BoundedInt::mul(self, rhs);
    }
}

impl Neg for BoundedInt {
    type Output = BoundedInt;

    fn neg(mut self) -> BoundedInt {
        self.negate();
        self
    }
}

impl Neg for &BoundedInt {
    type Output = BoundedInt;

    fn neg(self) -> BoundedInt {
        -*self
    }
}
