// Integration tests for Wisata Rec

use std::sync::Arc;
use wisata_rec::core::Recommender;
use wisata_rec::models::{PlaceRecord, SimilarityMatrix};
use wisata_rec::services::CatalogStore;

fn place(nama: &str, lat: f64, lon: f64) -> PlaceRecord {
    PlaceRecord {
        nama: nama.to_string(),
        kategori: "Alam".to_string(),
        rating: Some(4.4),
        jumlah_rating: Some(300),
        kecamatan: Some("Ciawi".to_string()),
        kabupaten_kota: Some("Kabupaten Bogor".to_string()),
        latitude: lat,
        longitude: lon,
        link_gambar: Some("https://img.example/p.jpg".to_string()),
        link: format!("https://maps.google.com/?q={},{}", lat, lon),
    }
}

/// Eight places around Bogor plus one far outlier, with a hand-built
/// similarity matrix (row i = similarity of everything to place i).
fn build_engine() -> Recommender {
    let places = vec![
        place("Kebun Raya Bogor", -6.5971, 106.7990),
        place("Curug Bidadari", -6.6123, 106.9003),
        place("Gunung Pancar", -6.5832, 106.9030),
        place("Situ Gede", -6.5510, 106.7470),
        place("Curug Leuwi Hejo", -6.5690, 106.9310),
        place("The Jungle Waterpark", -6.6360, 106.8110),
        place("Taman Safari Indonesia", -6.7190, 106.9440),
        place("Pantai Anyer", -6.3500, 105.8000), // ~113km west of the city
    ];

    let n = places.len();
    let mut rows = vec![vec![0.0; n]; n];
    for (i, row) in rows.iter_mut().enumerate() {
        for (j, v) in row.iter_mut().enumerate() {
            *v = if i == j {
                1.0
            } else {
                // Deterministic, symmetric, bounded scores
                1.0 / (1.0 + (i as f64 - j as f64).abs())
            };
        }
    }

    let matrix = SimilarityMatrix::new(rows).unwrap();
    Recommender::new(Arc::new(CatalogStore::new(places, matrix).unwrap()))
}

#[test]
fn test_end_to_end_recommendation() {
    let engine = build_engine();
    let result = engine.recommend("Kebun Raya Bogor", 5, 100.0).unwrap();

    assert_eq!(result.source.nama, "Kebun Raya Bogor");
    assert!((result.source.lat - -6.5971).abs() < 1e-9);

    // Bounded by top_n
    assert!(result.recommendations.len() <= 5);
    assert!(!result.recommendations.is_empty());

    for rec in &result.recommendations {
        // No result carries the source name
        assert_ne!(rec.nama, "Kebun Raya Bogor");

        // Distance string respects the radius and the "x.xx km" shape
        let km: f64 = rec.dist.strip_suffix(" km").unwrap().parse().unwrap();
        assert!(km <= 100.0);

        // Similarity is a one-decimal percentage
        assert!(rec.sim.ends_with('%'));
    }

    // Sorted by similarity descending
    let sims: Vec<f64> = result
        .recommendations
        .iter()
        .map(|r| r.sim.strip_suffix('%').unwrap().parse().unwrap())
        .collect();
    for pair in sims.windows(2) {
        assert!(pair[0] >= pair[1], "recommendations not sorted: {:?}", sims);
    }
}

#[test]
fn test_radius_excludes_remote_place() {
    let engine = build_engine();
    let result = engine.recommend("Kebun Raya Bogor", 10, 100.0).unwrap();

    // The coastal outlier is beyond 100km of Bogor
    assert!(result
        .recommendations
        .iter()
        .all(|r| r.nama != "Pantai Anyer"));
}

#[test]
fn test_wide_radius_includes_remote_place() {
    let engine = build_engine();
    let result = engine.recommend("Kebun Raya Bogor", 10, 500.0).unwrap();

    assert!(result
        .recommendations
        .iter()
        .any(|r| r.nama == "Pantai Anyer"));
}

#[test]
fn test_top_n_is_a_hard_cap() {
    let engine = build_engine();
    let result = engine.recommend("Gunung Pancar", 2, 500.0).unwrap();
    assert_eq!(result.recommendations.len(), 2);
}

#[test]
fn test_unknown_place_is_not_found() {
    let engine = build_engine();
    assert!(engine.recommend("Candi Borobudur", 5, 100.0).is_err());
}

#[test]
fn test_recommend_is_deterministic() {
    let engine = build_engine();
    let a = engine.recommend("Curug Bidadari", 5, 100.0).unwrap();
    let b = engine.recommend("Curug Bidadari", 5, 100.0).unwrap();

    let names_a: Vec<&String> = a.recommendations.iter().map(|r| &r.nama).collect();
    let names_b: Vec<&String> = b.recommendations.iter().map(|r| &r.nama).collect();
    assert_eq!(names_a, names_b);
}
