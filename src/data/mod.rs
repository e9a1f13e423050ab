mod vector_data;

pub use self::vector_data::VectorData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Text,
    Vector,
}

/// Value flowing through the transformation chain of a pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    Text(String),
    Vector(VectorData),
}

impl Data {
    pub fn data_type(&self) -> DataType {
        match self {
            Data::Text(_) => DataType::Text,
            Data::Vector(_) => DataType::Vector,
        }
    }
}

impl From<String> for Data {
    fn from(text: String) -> Self {
        Data::Text(text)
    }
}

impl<'a> From<&'a str> for Data {
    fn from(text: &'a str) -> Self {
        Data::Text(text.to_string())
    }
}

impl From<VectorData> for Data {
    fn from(vector: VectorData) -> Self {
        Data::Vector(vector)
    }
}
