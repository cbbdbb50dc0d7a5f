use crate::bounds::BoundingBox;
use crate::config::{AxisMask, TreeConfig};
use crate::faultside::{FaultCollector, FaultSide};
use crate::kdtree::KdTree;
use crate::point::{Point, PointSet};
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

#[wasm_bindgen(typescript_custom_section)]
const TS_CONSTANTS_FAULT: &'static str = r#"
export const FAULT_BOUNDARY = 3;
"#;

fn to_js_error(err: crate::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn triples<T: Copy>(flat: &[T]) -> Vec<[T; 3]> {
    flat.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect()
}

fn quads<T: Copy>(flat: &[T]) -> Vec<[T; 4]> {
    flat.chunks_exact(4).map(|c| [c[0], c[1], c[2], c[3]]).collect()
}

// --- K-D tree ---

/// WASM wrapper for the static 3D K-D tree.
#[wasm_bindgen(js_name = KdTree3D)]
pub struct KdTree3D {
    inner: KdTree,
}

#[wasm_bindgen(js_class = KdTree3D)]
impl KdTree3D {
    /// Builds a tree from a flat array of coordinates `[x, y, z, x, y, z, ...]`.
    /// Duplicate points are dropped.
    #[wasm_bindgen(constructor)]
    pub fn new(points: &[f64], max_leaf_size: usize, split_x: bool, split_y: bool, split_z: bool) -> Result<KdTree3D, JsValue> {
        let config = TreeConfig::new(max_leaf_size, AxisMask::new(split_x, split_y, split_z));
        let inner = KdTree::build(PointSet::from_flat(points), config).map_err(to_js_error)?;
        Ok(KdTree3D { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn count_points(&self) -> usize {
        self.inner.len()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> usize {
        self.inner.height()
    }

    /// Candidate points of the box as a flat coordinate array.
    pub fn search(&self, min_x: f64, min_y: f64, min_z: f64, max_x: f64, max_y: f64, max_z: f64) -> Vec<f64> {
        let bounds = BoundingBox::new([min_x, min_y, min_z], [max_x, max_y, max_z]);
        let mut found = Vec::new();
        self.inner.search(&bounds, &mut |p: &Point, _: usize| found.extend_from_slice(&p.coords()));
        found
    }

    /// Input positions of the candidate points of the box.
    pub fn search_indices(&self, min_x: f64, min_y: f64, min_z: f64, max_x: f64, max_y: f64, max_z: f64) -> Vec<u32> {
        let bounds = BoundingBox::new([min_x, min_y, min_z], [max_x, max_y, max_z]);
        self.inner.search_indices(&bounds).into_iter().map(|i| i as u32).collect()
    }
}

// --- Fault side ---

/// WASM wrapper for fault-side tagging of tetrahedral meshes.
#[wasm_bindgen(js_name = FaultSide3D)]
pub struct FaultSide3D {
    inner: FaultSide,
}

#[wasm_bindgen(js_class = FaultSide3D)]
impl FaultSide3D {
    /// Collects the fault faces of a mesh given as flat arrays: 3 coordinates
    /// per vertex, 4 vertex indices per element and 4 face tags per element.
    #[wasm_bindgen(constructor)]
    pub fn new(vertices: &[f64], elements: &[u32], boundaries: &[i32], direction: usize, max_leaf_size: usize) -> Result<FaultSide3D, JsValue> {
        let elements: Vec<[usize; 4]> = quads(elements).into_iter().map(|e| e.map(|v| v as usize)).collect();
        let mut collector = FaultCollector::new(direction).map_err(to_js_error)?;
        collector
            .add_mesh(&triples(vertices), &elements, &quads(boundaries))
            .map_err(to_js_error)?;
        let inner = collector.finish(max_leaf_size).map_err(to_js_error)?;
        Ok(FaultSide3D { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn count_points(&self) -> usize {
        self.inner.tree().len()
    }

    /// Returns 1 for every element left of the fault and 0 otherwise.
    pub fn classify(&self, vertices: &[f64], elements: &[u32]) -> Result<Vec<u32>, JsValue> {
        let elements: Vec<[usize; 4]> = quads(elements).into_iter().map(|e| e.map(|v| v as usize)).collect();
        let tags = self.inner.classify_mesh(&triples(vertices), &elements).map_err(to_js_error)?;
        Ok(tags.into_iter().map(u32::from).collect())
    }
}
