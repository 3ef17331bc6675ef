/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “GSI” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

///! common filesystem functions for the GSI data tools

use std::fs::{self,File};
use std::io::{self,Error as IOError,ErrorKind,Read,Write};
use std::path::{Path,PathBuf};

pub type Result<T> = io::Result<T>;

pub fn filename<'a,T: AsRef<Path>> (path: &'a T)->Option<&'a str> {
    path.as_ref().file_name().and_then(|ostr| ostr.to_str())
}

pub fn extension<'a,T: AsRef<Path>> (path: &'a T)->Option<&'a str> {
    path.as_ref().extension().and_then(|ostr| ostr.to_str())
}

pub fn ensure_dir (path: impl AsRef<Path>)->io::Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

pub fn ensure_writable_dir (path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    ensure_dir(path)?;

    let md = fs::metadata(path)?;
    if md.permissions().readonly() {
        Err( IOError::new( ErrorKind::PermissionDenied, format!("directory not writable: {path:?}")) )
    } else {
        Ok(())
    }
}

pub fn filepath_contents_as_string <P: AsRef<Path>> (path: &P) -> Result<String> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();
    let mut contents = String::with_capacity(len as usize);
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

pub fn filepath_contents <P: AsRef<Path>> (path: &P) -> Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();
    let mut contents = Vec::<u8>::with_capacity(len as usize);
    file.read_to_end(&mut contents)?;
    Ok(contents)
}

pub fn set_filepath_contents (dir: impl AsRef<Path>, filename: &str, new_contents: &[u8]) -> Result<()>  {
    let mut file = writable_empty_file( dir, filename)?;
    file.write_all(new_contents)?;
    Ok(())
}

pub fn writable_empty_file (dir: impl AsRef<Path>, filename: &str) -> Result<File> {
    let path = dir.as_ref().join(filename);
    File::create(&path)
}

pub fn file_length <P: AsRef<Path>> (path: P) -> Option<u64> {
    path.as_ref().metadata().ok().map(|md| md.len())
}
