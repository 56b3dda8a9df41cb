use glam::{vec3, Vec3};
use glint::gpu::Vertex;
use glint::{Error, Geometry};

/// Builds a ground plane with an octahedron resting on top of it.
///
/// Every face gets its own vertices, so that the octahedron is shaded flat.
pub fn geometry() -> Result<Geometry, Error> {
    let mut vertices = Vec::new();

    let ground = [
        vec3(-4.0, -1.0, -4.0),
        vec3(-4.0, -1.0, 4.0),
        vec3(4.0, -1.0, 4.0),
        vec3(4.0, -1.0, -4.0),
    ];

    for [a, b, c] in [[0, 1, 2], [0, 2, 3]] {
        push_face(&mut vertices, [ground[a], ground[b], ground[c]], Vec3::Y);
    }

    for sx in [-1.0, 1.0] {
        for sy in [-1.0, 1.0] {
            for sz in [-1.0, 1.0] {
                let face = [
                    vec3(sx, 0.0, 0.0),
                    vec3(0.0, sy, 0.0),
                    vec3(0.0, 0.0, sz),
                ];

                push_face(&mut vertices, face, vec3(sx, sy, sz));
            }
        }
    }

    let indices: Vec<u16> = (0..vertices.len() as u16).collect();

    Geometry::new(&indices, vertices)
}

/// Adds a flat-shaded face, winding it counter-clockwise when seen from the
/// `outwards` side.
fn push_face(vertices: &mut Vec<Vertex>, [a, b, c]: [Vec3; 3], outwards: Vec3) {
    let mut normal = (b - a).cross(c - a).normalize();

    let [b, c] = if normal.dot(outwards) < 0.0 {
        normal = -normal;
        [c, b]
    } else {
        [b, c]
    };

    vertices.extend([a, b, c].map(|position| Vertex::new(position, normal)));
}
