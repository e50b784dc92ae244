pub mod api_response;
pub mod jwt_utils;
pub mod media;
pub mod shopping_list_pdf;
pub mod validated_wrapper;
