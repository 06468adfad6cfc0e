mod form_dto;

pub use form_dto::{
    FormControlsDto, FormEventDto, FormResponseDto, FormStateDto, LocateFormDto,
    ValidationResponseDto,
};
