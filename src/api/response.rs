use crate::api::ApiResponse;

/// A status is a success when its hundreds digit is 2.
pub fn is_success(status_code: u16) -> bool {
    status_code / 100 == 2
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        is_success(self.status_code)
    }
}
