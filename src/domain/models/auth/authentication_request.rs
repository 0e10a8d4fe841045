/// 접근에 필요한 역할 (OR 조건)
#[derive(Debug, Clone)]
pub struct RequiredRole(pub Vec<String>);

impl RequiredRole {
    /// 사용자 역할이 요구사항을 만족하는지 확인
    pub fn is_satisfied(&self, user_role: &str) -> bool {
        self.0.iter().any(|role| role == user_role)
    }
}
