//! The Vehicles family: a closed family whose base type [Car] is an enum with one variant per
//! member. Used by the demos and tests and as a template for declaring other families.
//!
//! Because the family is closed, code that needs to know which member it has matches on [Car]
//! exhaustively or walks it with a [VehicleVisitor] instead of asking for the runtime type.

use crate::{impl_member, storage_traits::Family};

/// Marker type for the Vehicles family
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vehicles;

impl Family for Vehicles
{
    type Base = Car;

    fn name() -> &'static str
    {
        "Vehicles"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sedan
{
    plate: String,
}

impl Sedan
{
    pub fn new(plate: impl Into<String>) -> Self
    {
        Self {
            plate: plate.into(),
        }
    }

    pub fn plate(&self) -> &str
    {
        &self.plate
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Suv
{
    plate: String,
    seats: u8,
}

impl Suv
{
    pub fn new(plate: impl Into<String>, seats: u8) -> Self
    {
        Self {
            plate: plate.into(),
            seats,
        }
    }

    pub fn plate(&self) -> &str
    {
        &self.plate
    }

    pub fn seats(&self) -> u8
    {
        self.seats
    }
}

/// Base type of the [Vehicles] family
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Car
{
    Sedan(Sedan),
    Suv(Suv),
}

impl Car
{
    pub fn plate(&self) -> &str
    {
        match self
        {
            Car::Sedan(sedan) => sedan.plate(),
            Car::Suv(suv) => suv.plate(),
        }
    }

    pub fn kind(&self) -> &'static str
    {
        match self
        {
            Car::Sedan(_) => "sedan",
            Car::Suv(_) => "suv",
        }
    }

    pub fn as_sedan(&self) -> Option<&Sedan>
    {
        match self
        {
            Car::Sedan(sedan) => Some(sedan),
            _ => None,
        }
    }

    pub fn as_suv(&self) -> Option<&Suv>
    {
        match self
        {
            Car::Suv(suv) => Some(suv),
            _ => None,
        }
    }

    pub fn accept<V: VehicleVisitor>(&self, visitor: &mut V) -> V::Output
    {
        match self
        {
            Car::Sedan(sedan) => visitor.visit_sedan(sedan),
            Car::Suv(suv) => visitor.visit_suv(suv),
        }
    }
}

impl From<Sedan> for Car
{
    fn from(value: Sedan) -> Self
    {
        Car::Sedan(value)
    }
}

impl From<Suv> for Car
{
    fn from(value: Suv) -> Self
    {
        Car::Suv(value)
    }
}

impl_member!(Vehicles, [Car, Sedan, Suv]);

/// Typed visitor over the members of the [Vehicles] family
pub trait VehicleVisitor
{
    type Output;

    fn visit_sedan(&mut self, sedan: &Sedan) -> Self::Output;
    fn visit_suv(&mut self, suv: &Suv) -> Self::Output;
}
