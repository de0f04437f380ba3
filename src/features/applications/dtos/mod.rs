mod application_dto;

pub use application_dto::{
    ApplicationResponseDto, ReviewApplicationDto, ReviewDecision, SubmitApplicationDto,
};
