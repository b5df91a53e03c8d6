//! Conversion: parallel-array position reply → domain positions.

use super::wire::PositionBook;
use super::{Position, PositionError};

impl PositionBook {
    /// Zip the parallel arrays into one row per held position.
    ///
    /// The service guarantees equal lengths; a reply that breaks that is
    /// rejected rather than truncated to the shortest array.
    pub fn into_positions(self) -> Result<Vec<Position>, PositionError> {
        if self.symbols.len() != self.volumes.len() || self.symbols.len() != self.prices.len() {
            return Err(PositionError::LengthMismatch {
                symbols: self.symbols.len(),
                volumes: self.volumes.len(),
                prices: self.prices.len(),
            });
        }

        Ok(self
            .symbols
            .into_iter()
            .zip(self.volumes)
            .zip(self.prices)
            .map(|((symbol, volume), price)| Position {
                symbol,
                volume,
                price,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn book() -> PositionBook {
        PositionBook {
            symbols: vec!["2454.TW".to_string(), "2330.TW".to_string()],
            volumes: vec![Decimal::new(1000, 0), Decimal::new(2000, 0)],
            prices: vec![Decimal::new(11855, 1), Decimal::new(580, 0)],
        }
    }

    #[test]
    fn test_into_positions_preserves_index_correspondence() {
        let positions = book().into_positions().unwrap();
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0].symbol, "2454.TW");
        assert_eq!(positions[0].volume, Decimal::new(1000, 0));
        assert_eq!(positions[1].symbol, "2330.TW");
        assert_eq!(positions[1].price, Decimal::new(580, 0));
    }

    #[test]
    fn test_into_positions_rejects_length_mismatch() {
        let mut short = book();
        short.prices.pop();
        let err = short.into_positions().unwrap_err();
        assert!(matches!(
            err,
            PositionError::LengthMismatch {
                symbols: 2,
                volumes: 2,
                prices: 1
            }
        ));
    }

    #[test]
    fn test_into_positions_empty_book() {
        let empty = PositionBook {
            symbols: vec![],
            volumes: vec![],
            prices: vec![],
        };
        assert!(empty.into_positions().unwrap().is_empty());
    }
}
