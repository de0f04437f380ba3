mod ngo_dto;

pub use ngo_dto::{NgoResponseDto, NgoSearchQuery, UpdateNgoDto, UpsertNgoDto};
