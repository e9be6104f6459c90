use serde::Serialize;
use thiserror::Error;

/// Number of values in a face encoding.
pub const ENCODING_DIM: usize = 128;

/// Size of a stored encoding: 128 little-endian `f64`s.
pub const ENCODING_BYTES: usize = ENCODING_DIM * std::mem::size_of::<f64>();

#[derive(Error, Debug, PartialEq)]
pub enum EncodingError {
    #[error("expected 128 values, got {0}")]
    WrongDimension(usize),
    #[error("expected 1024 bytes, got {0}")]
    WrongByteLength(usize),
}

/// A 128-dimensional face descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceEncoding([f64; ENCODING_DIM]);

impl FaceEncoding {
    pub fn new(values: [f64; ENCODING_DIM]) -> Self {
        Self(values)
    }

    /// Euclidean distance to another encoding.
    pub fn distance(&self, other: &FaceEncoding) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EncodingError> {
        if bytes.len() != ENCODING_BYTES {
            return Err(EncodingError::WrongByteLength(bytes.len()));
        }

        let mut values = [0.0f64; ENCODING_DIM];
        for (value, chunk) in values.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut raw = [0u8; 8];
            raw.copy_from_slice(chunk);
            *value = f64::from_le_bytes(raw);
        }
        Ok(Self(values))
    }
}

impl TryFrom<Vec<f64>> for FaceEncoding {
    type Error = EncodingError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        let len = values.len();
        let values: [f64; ENCODING_DIM] = values
            .try_into()
            .map_err(|_| EncodingError::WrongDimension(len))?;
        Ok(Self(values))
    }
}

/// Row of the `employees` table.
#[derive(Debug, sqlx::FromRow)]
pub struct EmployeeRow {
    pub id: u64,
    pub name: String,
    pub face_encoding: Vec<u8>,
}

/// An enrolled identity with its decoded encoding.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: u64,
    pub name: String,
    #[serde(skip)]
    pub encoding: FaceEncoding,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = EncodingError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            encoding: FaceEncoding::from_bytes(&row.face_encoding)?,
            name: row.name,
        })
    }
}
