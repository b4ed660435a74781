//! Builders for pages and records used across unit tests

use super::{ApiInfo, CharacterRecord, NamedRef, PageResponse};
use serde_json::{json, Value};

pub(crate) fn record(id: u64) -> CharacterRecord {
    CharacterRecord {
        id,
        name: format!("Character {id}"),
        image: format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        gender: "Male".to_string(),
        species: "Human".to_string(),
        location: Some(NamedRef {
            name: "Citadel of Ricks".to_string(),
            url: None,
        }),
        origin: Some(NamedRef {
            name: "Earth (C-137)".to_string(),
            url: None,
        }),
        status: Some("Alive".to_string()),
        kind: None,
        episode: Vec::new(),
        url: None,
        created: None,
    }
}

pub(crate) fn page(ids: &[u64], next: Option<&str>, prev: Option<&str>) -> PageResponse {
    PageResponse {
        info: ApiInfo {
            count: 826,
            pages: 42,
            next: next.map(str::to_string),
            prev: prev.map(str::to_string),
        },
        results: ids.iter().copied().map(record).collect(),
    }
}

pub(crate) fn record_json(id: u64) -> Value {
    json!({
        "id": id,
        "name": format!("Character {id}"),
        "status": "Alive",
        "species": "Human",
        "type": "",
        "gender": "Female",
        "origin": {"name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1"},
        "location": {"name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3"},
        "image": format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        "episode": ["https://rickandmortyapi.com/api/episode/1"],
        "url": format!("https://rickandmortyapi.com/api/character/{id}"),
        "created": "2017-11-04T18:48:46.250Z"
    })
}

pub(crate) fn page_json(ids: &[u64], next: Option<&str>, prev: Option<&str>) -> Value {
    json!({
        "info": {"count": 826, "pages": 42, "next": next, "prev": prev},
        "results": ids.iter().copied().map(record_json).collect::<Vec<_>>()
    })
}
