use validator::Validate;

/// Zero-based page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
pub struct PageRequest {
    #[validate(range(min = 0))]
    pub page_number: i64,
    #[validate(range(min = 1, max = 50))]
    pub page_size: i64,
}

impl PageRequest {
    pub fn new(page_number: i64, page_size: i64) -> Result<Self, validator::ValidationErrors> {
        let request = Self {
            page_number,
            page_size,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn offset(&self) -> i64 {
        self.page_number.saturating_mul(self.page_size)
    }
}

/// One slice of a larger result set together with the size of the whole set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: i64,
    pub size: i64,
    pub total_elements: i64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: i64) -> Self {
        Self {
            content,
            number: request.page_number,
            size: request.page_size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> i64 {
        if self.size <= 0 || self.total_elements <= 0 {
            return 0;
        }
        (self.total_elements + self.size - 1) / self.size
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}
