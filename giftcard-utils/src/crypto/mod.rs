pub fn md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_md5() {
        let digest = md5("Hello");
        assert_eq!(digest, "8b1a9953c4611296a827abf8c47804d7");
    }
}
