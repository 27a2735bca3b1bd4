use crate::tensor::Tensor;
use ndarray::ArrayD;
use std::fmt;

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn display_recursive(
            f: &mut fmt::Formatter,
            data: &ArrayD<f32>,
            indices: &mut Vec<usize>,
            depth: usize,
        ) -> fmt::Result {
            if depth == data.ndim() {
                write!(f, "{:8.4}", data[&indices[..]])?;
            } else {
                write!(f, "[")?;
                let len = data.shape()[depth];
                for i in 0..len {
                    indices[depth] = i;
                    display_recursive(f, data, indices, depth + 1)?;
                    if i != len - 1 {
                        write!(f, ", ")?;
                        if depth == 0 && data.ndim() > 1 {
                            write!(f, "\n ")?;
                        }
                    }
                }
                write!(f, "]")?;
            }
            Ok(())
        }

        let shape = self.shape();
        if shape.len() > 2 {
            writeln!(
                f,
                "<对于阶数大于二（rank>2）的张量（形状：{shape:?}）无法展示具体数据>"
            )
        } else {
            let mut indices = vec![0; shape.len()];
            display_recursive(f, &self.data, &mut indices, 0)?;
            writeln!(f, "\n形状: {shape:?}")
        }
    }
}
