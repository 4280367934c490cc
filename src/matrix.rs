use std::{
    array, fmt,
    mem::{self, ManuallyDrop, MaybeUninit},
    ops::{Deref, DerefMut},
    slice,
};

use crate::{
    vector::view::{X, XY, XYZ, XYZW},
    Cast, Number, One, Vector, Zero,
};

mod affine;
mod ops;
mod projection;

/// A 1x1 matrix.
pub type Mat1<T> = Matrix<T, 1, 1>;
/// A 1x1 matrix with [`f32`] elements.
pub type Mat1f = Mat1<f32>;
/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 rows and 4 columns.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 2 columns.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// The matrix is stored as `R` row [`Vector`]s of length `C`, which can also be viewed as a flat
/// array of `R * C` elements (element `(row, col)` is at index `row * C + col`).
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a matrix with raw elements,
///   as well as creating them from an array of row or column vectors.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::from_iter_padded`] fills the matrix row by row from a flat list of elements, and
///   [`Matrix::from_rows_padded`] from a list of (possibly short) rows. Missing elements are 0.
/// - [`Matrix::diagonal`] puts a value on the diagonal and 0 everywhere else.
///   [`Matrix::from_diagonal`] does the same with a different value for each diagonal element.
/// - [`Matrix::resize`] embeds a matrix into a larger one (extending the identity) or crops it.
/// - The factories in the `affine` and `projection` groups create transformation matrices, eg.
///   [`Matrix::translation`], [`Matrix::rotation_axis_angle`], [`Matrix::perspective_fov`] or
///   [`Matrix::look_at`].
///
/// Additionally, some associated constants for commonly used matrices are defined:
///
/// - [`Matrix::ZERO`] is a matrix with every element set to 0.
/// - [`Matrix::IDENTITY`] has 1 on its diagonal and 0 everywhere else.
///
/// # Element Access
///
/// Indexing with a `usize` yields a row as a [`Vector`]. Indexing with a tuple `(row, col)` yields
/// a single element, matching common mathematical notation. Indices are 0-based.
///
/// ```
/// # use fastmath::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[1], vec2(2, 3));
/// assert_eq!(mat[1][0], 2);
/// ```
///
/// Matrices with up to 4 rows additionally expose their rows as the fields `x`, `y`, `z`, and `w`:
///
/// ```
/// # use fastmath::*;
/// let mat = Mat3f::IDENTITY;
/// assert_eq!(mat.y, Vec3f::Y);
/// assert_eq!(mat.z.z, 1.0);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing:
///
/// ```
/// # use fastmath::*;
/// let mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// assert_eq!(mat.get(0, 1), Some(&1));
/// assert_eq!(mat.get(0, 2), None);
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>(pub(crate) [Vector<T, C>; R]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The smallest dimension of the matrix (`R` or `C`).
    const MIN_DIMENSION: usize = if R > C { C } else { R };

    /// Creates a new [`Matrix`] in which the elements are wrapped in [`MaybeUninit`].
    const fn new_uninit() -> Matrix<MaybeUninit<T>, R, C> {
        // Safety: `uninit` is a valid value for the `MaybeUninit<T>` elements
        unsafe { MaybeUninit::<Matrix<MaybeUninit<T>, R, C>>::uninit().assume_init() }
    }

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(rows.map(Into::into))
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Matrix::from_rows(columns).transpose()
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| Vector::from_fn(|col| cb(row, col))))
    }

    /// Creates a [`Matrix`] from a flat, row-major list of elements.
    ///
    /// Elements missing from `iter` are set to zero, surplus ones are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let mat = Mat2x3::from_iter_padded([1, 2, 3, 4]);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 0, 0],
    /// ]));
    /// ```
    pub fn from_iter_padded<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Zero,
    {
        let mut iter = iter.into_iter();
        Self::from_fn(|_, _| iter.next().unwrap_or(T::ZERO))
    }

    /// Creates a [`Matrix`] from a list of rows, each of which may be shorter or longer than `C`.
    ///
    /// Missing rows and elements are set to zero, surplus ones are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let mat = Mat3::from_rows_padded([vec![1, 2], vec![3, 4, 5, 6]]);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 2, 0],
    ///     [3, 4, 5],
    ///     [0, 0, 0],
    /// ]));
    /// ```
    pub fn from_rows_padded<I>(rows: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = T>,
        T: Zero,
    {
        let mut rows = rows.into_iter();
        Self(array::from_fn(|_| match rows.next() {
            Some(row) => Vector::from_iter_padded(row),
            None => Vector::ZERO,
        }))
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  2,  4],
    ///     [ 6,  8, 10],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Converts each element to `U`, like an `as` cast.
    pub fn cast<U>(self) -> Matrix<U, R, C>
    where
        T: Cast<U>,
    {
        self.map(T::cast)
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R> {
        let mut out = Matrix::<T, C, R>::new_uninit();
        for (r, row) in self.0.into_iter().enumerate() {
            for (c, elem) in row.into_iter().enumerate() {
                out.0[c].0[r] = MaybeUninit::new(elem);
            }
        }
        // Safety: the loop above writes to each element.
        unsafe { out.assume_init() }
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|r| r.0.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|r| r.0.get_mut(col))
    }

    /// Returns a copy of the row at index `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is `R` or larger.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        self.0[row]
    }

    /// Returns a copy of the column at index `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col` is `C` or larger.
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        Vector::from_fn(|row| self.0[row][col])
    }

    /// Returns the rows of this matrix as a slice of [`Vector`]s.
    #[inline]
    pub fn rows(&self) -> &[Vector<T, C>; R] {
        &self.0
    }

    /// Returns all elements in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.as_flat_slice(), &[0, 1, 2, 3, 4, 5]);
    /// ```
    #[inline]
    pub fn as_flat_slice(&self) -> &[T] {
        // Safety: `Vector<T, C>` is a `repr(transparent)` wrapper around `[T; C]`, so `[Vector<T, C>; R]`
        // has the layout of `[T; R * C]`.
        unsafe { slice::from_raw_parts(self.0.as_ptr().cast::<T>(), R * C) }
    }

    /// Returns all elements in row-major order, mutably.
    #[inline]
    pub fn as_flat_mut_slice(&mut self) -> &mut [T] {
        // Safety: see `as_flat_slice`.
        unsafe { slice::from_raw_parts_mut(self.0.as_mut_ptr().cast::<T>(), R * C) }
    }

    /// Returns a matrix with the contents of `self`, but a potentially different size.
    ///
    /// The top-left `min(R, R2) x min(C, C2)` block is copied. If the new matrix is larger, the
    /// diagonal elements past the copied block are set to 1 and everything else to 0, so that
    /// embedding a matrix into a larger one extends it with the identity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.resize::<3, 3>(), Matrix::from_rows([
    ///     [1, 2, 0],
    ///     [3, 4, 0],
    ///     [0, 0, 1],
    /// ]));
    /// assert_eq!(mat.resize::<1, 2>(), Matrix::from_rows([
    ///     [1, 2]
    /// ]));
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(mut self) -> Matrix<T, R2, C2>
    where
        T: Zero + One,
    {
        let copied = R.min(R2).min(C).min(C2);
        Matrix::from_fn(|row, col| {
            if row < R && col < C {
                mem::replace(&mut self.0[row].0[col], T::ZERO)
            } else if row == col && row >= copied {
                T::ONE
            } else {
                T::ZERO
            }
        })
    }

    /// Copies the overlapping top-left block of `other` into `self`.
    ///
    /// Unlike [`Matrix::resize`], elements of `self` outside of that block are left as they are.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let mut mat = Mat3::from_iter_padded([9; 9]);
    /// mat.assign(Mat2::IDENTITY);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 0, 9],
    ///     [0, 1, 9],
    ///     [9, 9, 9],
    /// ]));
    /// ```
    pub fn assign<const R2: usize, const C2: usize>(&mut self, other: Matrix<T, R2, C2>) {
        for (dest, src) in self.0.iter_mut().zip(other.0) {
            dest.assign(src);
        }
    }

    /// Returns the matrix obtained by deleting row `row` and column `col` from `self`.
    ///
    /// `R2` and `C2` must be one less than `R` and `C`, which is checked at compile time.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    ///     [7, 8, 9],
    /// ]);
    /// assert_eq!(mat.submatrix::<2, 2>(1, 0), Matrix::from_rows([
    ///     [2, 3],
    ///     [8, 9],
    /// ]));
    /// ```
    #[doc(alias = "minor")]
    pub fn submatrix<const R2: usize, const C2: usize>(
        &self,
        row: usize,
        col: usize,
    ) -> Matrix<T, R2, C2>
    where
        T: Copy,
    {
        let () = AssertMinor::<R, C, R2, C2>::OK;
        debug_assert!(row < R && col < C, "submatrix index out of range");

        Matrix::from_fn(|r, c| {
            let r = if r < row { r } else { r + 1 };
            let c = if c < col { c } else { c + 1 };
            self.0[r].0[c]
        })
    }

    /// Returns `self`, but with the element at `(row, col)` replaced with `elem`, without dropping
    /// the old element at that position.
    const fn with_leaky_elem(self, row: usize, col: usize, elem: T) -> Self {
        unsafe {
            // Leaks whatever was at `(row, col)` before.
            union UnWrapper<T, const R: usize, const C: usize> {
                wrapped: ManuallyDrop<Matrix<ManuallyDrop<T>, R, C>>,
                unwrapped: ManuallyDrop<Matrix<T, R, C>>,
            }

            let mut wrapped = ManuallyDrop::into_inner(
                UnWrapper {
                    unwrapped: ManuallyDrop::new(self),
                }
                .wrapped,
            );
            wrapped.0[row].0[col] = ManuallyDrop::new(elem);

            ManuallyDrop::into_inner(
                UnWrapper {
                    wrapped: ManuallyDrop::new(wrapped),
                }
                .unwrapped,
            )
        }
    }
}

/// Compile-time check that `R2 x C2` is the size of a minor of an `R x C` matrix.
struct AssertMinor<const R: usize, const C: usize, const R2: usize, const C2: usize>;

impl<const R: usize, const C: usize, const R2: usize, const C2: usize> AssertMinor<R, C, R2, C2> {
    const OK: () = assert!(
        R2 + 1 == R && C2 + 1 == C,
        "a submatrix has exactly one row and one column less than its matrix"
    );
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const C: usize>(&'a Vector<T, C>);
        impl<'a, T: fmt::Debug, const C: usize> fmt::Debug for FormatRow<'a, T, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, elem) in self.0.as_slice().iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

impl<T: Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = unsafe {
        // Because `[T::ZERO; N]` requires `T` to be `Copy`, we use this gross hack to duplicate
        // `T::ZERO` without that `Copy` bound.
        let mut mat = Self::new_uninit();
        let mut row = 0;
        while row < R {
            let mut col = 0;
            while col < C {
                mat.0[row].0[col] = MaybeUninit::new(T::ZERO);
                col += 1;
            }
            row += 1;
        }

        // Safety: the loop above has initialized every element.
        mat.assume_init()
    };

    /// Creates a matrix with `x` on the main diagonal and 0 everywhere else.
    ///
    /// Only the first `min(R, C)` diagonal elements exist in non-square matrices.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// assert_eq!(Mat2x3::diagonal(5), Matrix::from_rows([
    ///     [5, 0, 0],
    ///     [0, 5, 0],
    /// ]));
    /// ```
    pub fn diagonal(x: T) -> Self
    where
        T: Copy,
    {
        Self::from_fn(|row, col| if row == col { x } else { T::ZERO })
    }
}

impl<T, const R: usize, const C: usize> Matrix<MaybeUninit<T>, R, C> {
    /// Removes the [`MaybeUninit`] wrapper from each matrix element.
    ///
    /// See [`MaybeUninit::assume_init`] for details about the safety invariant the caller needs to
    /// uphold.
    const unsafe fn assume_init(self) -> Matrix<T, R, C> {
        // Safety: `MaybeUninit<T>` and `T` have the same layout.
        union UnWrapper<T, const R: usize, const C: usize> {
            uninit: ManuallyDrop<Matrix<MaybeUninit<T>, R, C>>,
            init: ManuallyDrop<Matrix<T, R, C>>,
        }

        ManuallyDrop::into_inner(
            UnWrapper {
                uninit: ManuallyDrop::new(self),
            }
            .init,
        )
    }
}

impl<T: Zero + One, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    pub const IDENTITY: Self = {
        let mut this = Self::ZERO;
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            this = this.with_leaky_elem(i, i, T::ONE);
            i += 1;
        }
        this
    };
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), [1, 4]);
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i].0[i])
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero,
    {
        let mut this = Self::ZERO;
        for (i, elem) in diag.into().into_iter().enumerate() {
            this.0[i].0[i] = elem;
        }
        this
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// assert_eq!(Matrix::from_diagonal([1, 2, 3]).trace(), 1 + 2 + 3);
    /// assert_eq!(Mat3f::IDENTITY.trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i].0[i])
    }

    /// Transposes this square matrix without moving it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// let mut mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// mat.transpose_in_place();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 3],
    ///     [2, 4],
    /// ]));
    /// ```
    pub fn transpose_in_place(&mut self) {
        for row in 0..N {
            for col in row + 1..N {
                let (upper, lower) = self.0.split_at_mut(col);
                mem::swap(&mut upper[row].0[col], &mut lower[0].0[row]);
            }
        }
    }
}

fn cofactor_sign<T: Number>(row: usize, col: usize) -> T {
    if (row + col) % 2 == 0 {
        T::ONE
    } else {
        -T::ONE
    }
}

impl<T: Number> Matrix<T, 1, 1> {
    /// Returns the [determinant] of the matrix, which is its only element.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        self.0[0].0[0]
    }

    /// Inverts this 1x1 matrix, or returns [`None`] if its element is zero.
    pub fn try_invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            log::debug!("attempted to invert a singular 1x1 matrix");
            return None;
        }

        Some(Matrix([Vector([T::ONE / det])]))
    }

    /// Inverts this 1x1 matrix.
    ///
    /// # Panics
    ///
    /// This method will panic if `self` is not invertible (ie. if its [`determinant()`] is zero).
    ///
    /// [`determinant()`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastmath::*;
    /// assert_eq!(Mat1::<i32>::IDENTITY.invert(), Mat1::<i32>::IDENTITY);
    /// assert_eq!(Matrix::from_rows([[4.0]]).invert(), Matrix::from_rows([[0.25]]));
    /// ```
    pub fn invert(&self) -> Self {
        match self.try_invert() {
            Some(inv) => inv,
            None => panic!("attempt to invert a non-invertible matrix"),
        }
    }
}

/// Determinant and inverse by cofactor expansion, for each matrix size that has a minor.
macro_rules! cofactor_expansion {
    ($($n:literal => $minor:literal),+) => {
        $(
            impl<T: Number> Matrix<T, $n, $n> {
                /// Returns the [determinant] of the matrix.
                ///
                /// This performs a Laplace expansion along the first row.
                ///
                /// [determinant]: https://en.wikipedia.org/wiki/Determinant
                pub fn determinant(&self) -> T {
                    (0..$n).fold(T::ZERO, |det, col| {
                        det + self.0[0].0[col]
                            * cofactor_sign::<T>(0, col)
                            * self.submatrix::<$minor, $minor>(0, col).determinant()
                    })
                }

                /// Returns the adjugate (the transposed cofactor matrix) of `self`.
                pub fn adjugate(&self) -> Self {
                    Matrix::from_fn(|row, col| {
                        cofactor_sign::<T>(col, row)
                            * self.submatrix::<$minor, $minor>(col, row).determinant()
                    })
                }

                /// Inverts this matrix, or returns [`None`] if it is singular.
                ///
                /// The inverse is computed as the adjugate divided by the determinant.
                pub fn try_invert(&self) -> Option<Self> {
                    let adj = self.adjugate();
                    let det = (0..$n).fold(T::ZERO, |det, col| {
                        det + self.0[0].0[col] * adj.0[col].0[0]
                    });
                    if det == T::ZERO {
                        log::debug!("attempted to invert a singular {}x{} matrix", $n, $n);
                        return None;
                    }

                    Some(adj * (T::ONE / det))
                }

                /// Inverts this matrix.
                ///
                /// # Panics
                ///
                /// This method will panic if `self` is not invertible (ie. if its
                /// [`determinant()`] is zero). Use [`try_invert`] to handle that case.
                ///
                /// [`determinant()`]: Self::determinant
                /// [`try_invert`]: Self::try_invert
                pub fn invert(&self) -> Self {
                    match self.try_invert() {
                        Some(inv) => inv,
                        None => panic!("attempt to invert a non-invertible matrix"),
                    }
                }
            }
        )+
    };
}
cofactor_expansion!(2 => 1, 3 => 2, 4 => 3);

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

/// Implements named row access (`m.x`, `m.y`, ...) for matrices with up to 4 rows.
macro_rules! row_view {
    ($($rows:literal => $view:ident),+) => {
        $(
            impl<T, const C: usize> Deref for Matrix<T, $rows, C> {
                type Target = $view<Vector<T, C>>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T, const C: usize> DerefMut for Matrix<T, $rows, C> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}
row_view!(1 => X, 2 => XY, 3 => XYZ, 4 => XYZW);

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{vec2, vec3, Vec3};

    use super::*;

    fn rng() -> fastrand::Rng {
        fastrand::Rng::with_seed(0x0bad_cafe)
    }

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]),
            Mat2x3::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
    }

    #[test]
    fn layout() {
        #[rustfmt::skip]
        let mut mat = Matrix::from_rows([
            [0, 1, 2],
            [3, 4, 5],
        ]);
        assert_eq!(mat.as_flat_slice()[1 * 3 + 2], mat[(1, 2)]);
        mat.as_flat_mut_slice()[3] = 30;
        assert_eq!(mat[1][0], 30);
        assert_eq!(mat.y, vec3(30, 4, 5));
        mat.x.z = 20;
        assert_eq!(mat[(0, 2)], 20);
        assert_eq!(mat.column(2), vec2(20, 5));
        assert_eq!(mat.row(1), vec3(30, 4, 5));
        assert_eq!(bytemuck::cast_slice::<_, i32>(mat.rows()), mat.as_flat_slice());
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.into_diagonal(), [1, 2]);
        assert_eq!(Mat4::<i32>::diagonal(1), Mat4::IDENTITY);
        assert_eq!(Mat3x2::<i32>::IDENTITY, Mat3x2::diagonal(1));
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(
            format!("{:?}", Mat2x3::<i32>::IDENTITY),
            "[[1, 0, 0], [0, 1, 0]]"
        );
    }

    #[rustfmt::skip]
    #[test]
    fn resize_and_assign() {
        let mat = Matrix::from_rows([
            [1, 2],
            [3, 4],
        ]);

        assert_eq!(mat.resize::<3, 4>(), Matrix::from_rows([
            [1, 2, 0, 0],
            [3, 4, 0, 0],
            [0, 0, 1, 0],
        ]));

        let mut target = Matrix::from_rows([
            [7, 7, 7],
            [7, 7, 7],
            [7, 7, 7],
        ]);
        target.assign(mat);
        assert_eq!(target, Matrix::from_rows([
            [1, 2, 7],
            [3, 4, 7],
            [7, 7, 7],
        ]));

        let wide = Mat2x4::from_rows([
            [1, 2, 3, 4],
            [5, 6, 7, 8],
        ]);
        assert_eq!(wide.resize::<3, 3>(), Matrix::from_rows([
            [1, 2, 3],
            [5, 6, 7],
            [0, 0, 1],
        ]));
    }

    #[test]
    fn padded_construction() {
        assert_eq!(Mat2::from_iter_padded([1, 2, 3, 4, 5]), Matrix::from_rows([[1, 2], [3, 4]]));
        assert_eq!(Mat2::<i32>::from_iter_padded([]), Mat2::ZERO);
        assert_eq!(
            Mat2x3::from_rows_padded([[1].as_slice(), &[2, 3]].map(|r| r.iter().copied())),
            Matrix::from_rows([[1, 0, 0], [2, 3, 0]])
        );
    }

    #[test]
    fn transpose() {
        let mut rng = rng();
        let mat = Mat3x4::from_fn(|_, _| rng.i32(-100..100));
        assert_eq!(mat.transpose().transpose(), mat);

        let square = Mat4::from_fn(|_, _| rng.i32(-100..100));
        let mut in_place = square;
        in_place.transpose_in_place();
        assert_eq!(in_place, square.transpose());
    }

    #[test]
    fn submatrix() {
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [1, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
        ]);
        assert_eq!(mat.submatrix::<2, 2>(0, 0), Matrix::from_rows([[5, 6], [8, 9]]));
        assert_eq!(mat.submatrix::<2, 2>(2, 2), Matrix::from_rows([[1, 2], [4, 5]]));
        assert_eq!(mat.submatrix::<2, 2>(1, 1), Matrix::from_rows([[1, 3], [7, 9]]));
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat1f::ZERO.determinant(), 0.0);
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat4f::ZERO.determinant(), 0.0);
        assert_eq!(Mat1f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat2f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4f::IDENTITY.determinant(), 1.0);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(testmat.determinant(), 54);
        assert_eq!(testmat.transpose().determinant(), 54);

        #[rustfmt::skip]
        let mat4 = Matrix::from_rows([
            [1, 0, 2, -1],
            [3, 0, 0,  5],
            [2, 1, 4, -3],
            [1, 0, 5,  0],
        ]);
        assert_eq!(mat4.determinant(), 30);
    }

    #[test]
    fn invert() {
        let mat = Matrix::from_rows([[2.0, 3.0], [2.0, 2.0]]);
        assert_eq!(mat.invert(), Matrix::from_rows([[-1.0, 1.5], [1.0, -1.0]]));

        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [1.0, 2.0, 3.0],
            [3.0, 2.0, 1.0],
            [2.0, 1.0, 3.0],
        ]);
        #[rustfmt::skip]
        let expected = Matrix::from_rows([
            [-5.0 / 12.0,  0.25,  1.0 / 3.0],
            [ 7.0 / 12.0,  0.25, -2.0 / 3.0],
            [ 1.0 / 12.0, -0.25,  1.0 / 3.0],
        ]);
        assert_relative_eq!(mat.invert(), expected, epsilon = 1e-12);
        assert_relative_eq!(mat * mat.invert(), Mat3d::IDENTITY, epsilon = 1e-12);

        assert_eq!(Mat1::<i32>::IDENTITY.invert(), Mat1::IDENTITY);
        assert_eq!(Mat2::<i32>::IDENTITY.invert(), Mat2::IDENTITY);
        assert_eq!(Mat3f::IDENTITY.invert(), Mat3f::IDENTITY);
        assert_eq!(Mat4d::IDENTITY.invert(), Mat4d::IDENTITY);
    }

    #[test]
    fn invert_random() {
        let mut rng = rng();
        let mut checked = 0;
        while checked < 100 {
            let mat = Mat4d::from_fn(|_, _| rng.f64() * 2.0 - 1.0);
            if mat.determinant().abs() < 1e-3 {
                continue;
            }
            assert_relative_eq!(mat * mat.invert(), Mat4d::IDENTITY, epsilon = 1e-5);
            assert_relative_eq!(mat.invert() * mat, Mat4d::IDENTITY, epsilon = 1e-5);
            checked += 1;
        }
    }

    #[test]
    fn singular() {
        let mat = Matrix::from_rows([[1.0, 2.0], [2.0, 4.0]]);
        assert_eq!(mat.determinant(), 0.0);
        assert_eq!(mat.try_invert(), None);
        assert_eq!(Mat1f::ZERO.try_invert(), None);
        assert_eq!(Mat4f::ZERO.try_invert(), None);
        assert!(Mat3f::IDENTITY.try_invert().is_some());
    }

    #[test]
    #[should_panic(expected = "non-invertible")]
    fn invert_singular_panics() {
        Mat3::<f32>::ZERO.invert();
    }

    #[test]
    fn cast() {
        let mat = Matrix::from_rows([[1.5f32, -2.5]]);
        assert_eq!(mat.cast::<i32>(), Matrix::from_rows([[1, -2]]));
        let _: Vec3<f64> = Mat3::<f64>::IDENTITY.into_diagonal();
    }
}
