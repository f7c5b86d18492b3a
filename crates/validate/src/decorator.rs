//! Stacking validation stages in front of a handler.
//!
//! `ValidateBodyDecorator` applied to `H` yields `ValidateBody<H>`, so a chain built with
//! [`decorators`] stays statically typed. The stage added first ends up innermost and
//! runs last.

pub trait Decorator<In> {
    type Out;

    fn decorate(&self, raw: In) -> Self::Out;
}

#[derive(Default, Clone, Copy, Debug)]
pub struct IdentityDecorator;

impl<In> Decorator<In> for IdentityDecorator {
    type Out = In;

    #[inline]
    fn decorate(&self, raw: In) -> Self::Out {
        raw
    }
}

#[derive(Clone, Debug)]
pub struct DecoratorComposer<D1, D2> {
    decorator_1: D1,
    decorator_2: D2,
}

impl<D1, D2> DecoratorComposer<D1, D2> {
    pub fn new(decorator_1: D1, decorator_2: D2) -> Self {
        Self { decorator_1, decorator_2 }
    }

    /// add a [`Decorator`] to the end, the argument will decorate at last
    pub fn and_then<D3>(self, decorator: D3) -> DecoratorComposer<Self, D3> {
        DecoratorComposer::new(self, decorator)
    }
}

/// An empty composer to start a chain of decorators from
pub fn decorators() -> DecoratorComposer<IdentityDecorator, IdentityDecorator> {
    DecoratorComposer::default()
}

impl Default for DecoratorComposer<IdentityDecorator, IdentityDecorator> {
    fn default() -> Self {
        Self::new(IdentityDecorator, IdentityDecorator)
    }
}

impl<In, D1, D2> Decorator<In> for DecoratorComposer<D1, D2>
where
    D1: Decorator<In>,
    D2: Decorator<D1::Out>,
{
    type Out = D2::Out;

    fn decorate(&self, raw: In) -> Self::Out {
        let output_1 = self.decorator_1.decorate(raw);
        self.decorator_2.decorate(output_1)
    }
}
