//! The `Fleet` — an owned, ordered collection of cars.
//!
//! Iteration order is creation order and never changes during a run.  The
//! dispatch engine relies on this: cars decided earlier in a tick have their
//! committed destinations visible to cars decided later, which is the whole
//! arbitration mechanism.

use lift_core::{CarId, Floor};

use crate::Car;

/// All cars in the building, in fixed iteration order.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet {
    cars: Vec<Car>,
}

impl Fleet {
    /// Create `car_count` cars, all parked at `initial_floor`.
    pub fn new(car_count: u32, initial_floor: Floor) -> Self {
        let cars = (0..car_count)
            .map(|i| Car::new(CarId(i), initial_floor))
            .collect();
        Self { cars }
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Read-only slice of all cars in iteration order.
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// One car by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of range — fleet membership is fixed at
    /// construction, so an unknown `CarId` is a caller bug.
    #[inline]
    pub fn car(&self, id: CarId) -> &Car {
        &self.cars[id.index()]
    }

    /// Mutable reference to one car.
    ///
    /// # Panics
    /// Panics if `id` is out of range.
    #[inline]
    pub fn car_mut(&mut self, id: CarId) -> &mut Car {
        &mut self.cars[id.index()]
    }

    /// Iterator over all `CarId`s in fleet iteration order.
    pub fn car_ids(&self) -> impl Iterator<Item = CarId> + '_ {
        (0..self.cars.len() as u32).map(CarId)
    }
}
